//! Fixed values stamped into every generated component definition.
//!
//! None of these are configurable in this version.

/// Version of the generated document itself
pub const DOCUMENT_VERSION: &str = "0.0.1";

/// OSCAL schema version the document targets
pub const OSCAL_VERSION: &str = "1.0.4";

pub const DOCUMENT_TITLE: &str = "DUBBD";

pub const AUTHOR_PARTY_TYPE: &str = "organization";
pub const AUTHOR_NAME: &str = "Defense Unicorns";
pub const AUTHOR_LINK_REL: &str = "website";
pub const AUTHOR_WEBSITE: &str = "https://defenseunicorns.com";

pub const COMPONENT_TYPE: &str = "software";
pub const COMPONENT_PURPOSE: &str = "Purpose of the component";

pub const PROVIDER_ROLE_ID: &str = "provider";

/// NIST SP 800-53 rev5 catalog every implemented requirement refers to
pub const CONTROL_CATALOG_SOURCE: &str = "https://raw.githubusercontent.com/usnistgov/oscal-content/master/nist.gov/SP800-53/rev5/json/NIST_SP-800-53_rev5_catalog.json";

/// Description of the control implementation attached to a component
pub fn control_implementation_description(component_name: &str) -> String {
    format!(
        "Controls implemented by {} for inheritance by applications",
        component_name
    )
}
