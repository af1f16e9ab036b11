//! OSCAL component definition model.
//!
//! Field declaration order is the serialization order, and serialized names
//! follow the OSCAL kebab-case convention.

use serde::Serialize;

/// Root of a generated component definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComponentDefinition {
    uuid: String,
    metadata: Metadata,
    components: Vec<Component>,
}

impl ComponentDefinition {
    pub fn new(uuid: String, metadata: Metadata, components: Vec<Component>) -> Self {
        Self {
            uuid,
            metadata,
            components,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Every identifier carried by the document, in document order.
    ///
    /// Includes the provider party references on responsible roles.
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.uuid.as_str()];
        ids.extend(self.metadata.parties.iter().map(|p| p.uuid.as_str()));
        for component in &self.components {
            ids.push(&component.uuid);
            for role in &component.responsible_roles {
                ids.extend(role.party_uuids.iter().map(String::as_str));
            }
            for implementation in &component.control_implementations {
                ids.push(&implementation.uuid);
                ids.extend(
                    implementation
                        .implemented_requirements
                        .iter()
                        .map(|r| r.uuid.as_str()),
                );
            }
        }
        ids
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    version: String,
    last_modified: String,
    oscal_version: String,
    title: String,
    parties: Vec<Party>,
}

impl Metadata {
    pub fn new(
        version: String,
        last_modified: String,
        oscal_version: String,
        title: String,
        parties: Vec<Party>,
    ) -> Self {
        Self {
            version,
            last_modified,
            oscal_version,
            title,
            parties,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// RFC 3339 timestamp of the transform
    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }

    pub fn oscal_version(&self) -> &str {
        &self.oscal_version
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }
}

/// Organization or person referenced by components
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Party {
    #[serde(rename = "type")]
    party_type: String,
    name: String,
    uuid: String,
    links: Vec<Link>,
}

impl Party {
    pub fn new(party_type: String, name: String, uuid: String, links: Vec<Link>) -> Self {
        Self {
            party_type,
            name,
            uuid,
            links,
        }
    }

    pub fn party_type(&self) -> &str {
        &self.party_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    rel: String,
    href: String,
}

impl Link {
    pub fn new(rel: String, href: String) -> Self {
        Self { rel, href }
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Software or hardware unit under configuration control
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Component {
    uuid: String,
    title: String,
    description: String,
    #[serde(rename = "type")]
    component_type: String,
    purpose: String,
    responsible_roles: Vec<ResponsibleRole>,
    control_implementations: Vec<ControlImplementation>,
}

impl Component {
    pub fn new(
        uuid: String,
        title: String,
        description: String,
        component_type: String,
        purpose: String,
        responsible_roles: Vec<ResponsibleRole>,
        control_implementations: Vec<ControlImplementation>,
    ) -> Self {
        Self {
            uuid,
            title,
            description,
            component_type,
            purpose,
            responsible_roles,
            control_implementations,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn responsible_roles(&self) -> &[ResponsibleRole] {
        &self.responsible_roles
    }

    pub fn control_implementations(&self) -> &[ControlImplementation] {
        &self.control_implementations
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResponsibleRole {
    role_id: String,
    party_uuids: Vec<String>,
}

impl ResponsibleRole {
    pub fn new(role_id: String, party_uuids: Vec<String>) -> Self {
        Self {
            role_id,
            party_uuids,
        }
    }

    pub fn role_id(&self) -> &str {
        &self.role_id
    }

    /// Party references; not required to resolve to a `Party` of the document
    pub fn party_uuids(&self) -> &[String] {
        &self.party_uuids
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ControlImplementation {
    source: String,
    description: String,
    uuid: String,
    implemented_requirements: Vec<ImplementedRequirement>,
}

impl ControlImplementation {
    pub fn new(
        source: String,
        description: String,
        uuid: String,
        implemented_requirements: Vec<ImplementedRequirement>,
    ) -> Self {
        Self {
            source,
            description,
            uuid,
            implemented_requirements,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn implemented_requirements(&self) -> &[ImplementedRequirement] {
        &self.implemented_requirements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImplementedRequirement {
    uuid: String,
    control_id: String,
    description: String,
}

impl ImplementedRequirement {
    pub fn new(uuid: String, control_id: String, description: String) -> Self {
        Self {
            uuid,
            control_id,
            description,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
