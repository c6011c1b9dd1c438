// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Access control lists for buckets and objects.
//!
//! An [Acl] grants a [Role] to an [Entity]. Entities are users, groups,
//! domains, or project teams. In the JSON API entities are encoded as strings,
//! for example `user-liz@example.com` or `project-owners-my-project`.
//!
//! # Example
//! ```
//! # use google_cloud_storage::acl::{Acl, Entity, Role};
//! let acl = Acl::builder(Entity::user("liz@example.com"), Role::Reader)
//!     .etag("CAE=")
//!     .build();
//! let wire = acl.to_bucket_wire();
//! assert_eq!(wire.entity.as_deref(), Some("user-liz@example.com"));
//! assert_eq!(wire.role.as_deref(), Some("READER"));
//! ```

use crate::model::{BucketAccessControl, ObjectAccessControl};

const ALL_USERS: &str = "allUsers";
const ALL_AUTHENTICATED_USERS: &str = "allAuthenticatedUsers";

/// The access granted by an [Acl].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    Owner,
    Reader,
    Writer,
    /// A role unknown to this version of the client library.
    UnknownValue(String),
}

impl Role {
    /// The name of the role in the JSON API.
    pub fn name(&self) -> &str {
        match self {
            Self::Owner => "OWNER",
            Self::Reader => "READER",
            Self::Writer => "WRITER",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "OWNER" => Self::Owner,
            "READER" => Self::Reader,
            "WRITER" => Self::Writer,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The team within a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectRole {
    Owners,
    Editors,
    Viewers,
}

impl ProjectRole {
    /// The name of the team, as used in entity strings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Owners => "owners",
            Self::Editors => "editors",
            Self::Viewers => "viewers",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "owners" => Some(Self::Owners),
            "editors" => Some(Self::Editors),
            "viewers" => Some(Self::Viewers),
            _ => None,
        }
    }
}

/// The type of an [Entity].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityType {
    Domain,
    Group,
    User,
    Project,
    Unknown,
}

/// The holder of an [Acl].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Entity {
    /// All the users in a domain.
    Domain(String),
    /// A group, identified by its email.
    Group(String),
    /// A user, identified by its email, or one of the special values
    /// `allUsers` and `allAuthenticatedUsers`.
    User(String),
    /// A team within a project.
    Project {
        project_role: ProjectRole,
        project_id: String,
    },
    /// An entity string this library does not recognize.
    Raw(String),
}

impl Entity {
    pub fn domain<T: Into<String>>(domain: T) -> Self {
        Self::Domain(domain.into())
    }

    pub fn group<T: Into<String>>(email: T) -> Self {
        Self::Group(email.into())
    }

    pub fn user<T: Into<String>>(email: T) -> Self {
        Self::User(email.into())
    }

    pub fn project<T: Into<String>>(project_role: ProjectRole, project_id: T) -> Self {
        Self::Project {
            project_role,
            project_id: project_id.into(),
        }
    }

    pub fn raw<T: Into<String>>(value: T) -> Self {
        Self::Raw(value.into())
    }

    /// Anyone on the internet, authenticated or not.
    pub fn all_users() -> Self {
        Self::User(ALL_USERS.to_string())
    }

    /// Anyone authenticated with a Google account.
    pub fn all_authenticated_users() -> Self {
        Self::User(ALL_AUTHENTICATED_USERS.to_string())
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Domain(_) => EntityType::Domain,
            Self::Group(_) => EntityType::Group,
            Self::User(_) => EntityType::User,
            Self::Project { .. } => EntityType::Project,
            Self::Raw(_) => EntityType::Unknown,
        }
    }

    /// Encodes the entity in the JSON API format.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Domain(d) => format!("domain-{d}"),
            Self::Group(e) => format!("group-{e}"),
            Self::User(e) if e == ALL_USERS || e == ALL_AUTHENTICATED_USERS => e.clone(),
            Self::User(e) => format!("user-{e}"),
            Self::Project {
                project_role,
                project_id,
            } => format!("project-{}-{project_id}", project_role.name()),
            Self::Raw(v) => v.clone(),
        }
    }

    /// Decodes an entity in the JSON API format.
    ///
    /// Strings that are not recognized are returned as [Entity::Raw].
    pub fn from_wire(value: &str) -> Self {
        if value == ALL_USERS || value == ALL_AUTHENTICATED_USERS {
            return Self::User(value.to_string());
        }
        if let Some(email) = value.strip_prefix("user-") {
            return Self::User(email.to_string());
        }
        if let Some(email) = value.strip_prefix("group-") {
            return Self::Group(email.to_string());
        }
        if let Some(domain) = value.strip_prefix("domain-") {
            return Self::Domain(domain.to_string());
        }
        if let Some((project_role, project_id)) = value
            .strip_prefix("project-")
            .and_then(|rest| rest.split_once('-'))
            .and_then(|(team, id)| ProjectRole::from_name(team).map(|r| (r, id)))
        {
            return Self::Project {
                project_role,
                project_id: project_id.to_string(),
            };
        }
        tracing::debug!("unrecognized ACL entity {value:?}, keeping it as a raw entity");
        Self::Raw(value.to_string())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// An access control entry: an [Entity] and the [Role] granted to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Acl {
    entity: Entity,
    role: Role,
    id: Option<String>,
    etag: Option<String>,
}

impl Acl {
    /// Creates an ACL granting `role` to `entity`.
    pub fn new(entity: Entity, role: Role) -> Self {
        Self {
            entity,
            role,
            id: None,
            etag: None,
        }
    }

    /// Returns a builder for an ACL granting `role` to `entity`.
    pub fn builder(entity: Entity, role: Role) -> AclBuilder {
        AclBuilder {
            inner: Self::new(entity, role),
        }
    }

    /// Returns a builder initialized with the values of this ACL.
    pub fn to_builder(&self) -> AclBuilder {
        AclBuilder {
            inner: self.clone(),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Converts the ACL to a bucket access control entry.
    pub fn to_bucket_wire(&self) -> BucketAccessControl {
        let mut builder = BucketAccessControl::builder()
            .entity(self.entity.to_wire())
            .role(self.role.name());
        if let Some(id) = &self.id {
            builder = builder.id(id);
        }
        if let Some(etag) = &self.etag {
            builder = builder.etag(etag);
        }
        builder.build()
    }

    /// Converts the ACL to an object access control entry.
    pub fn to_object_wire(&self) -> ObjectAccessControl {
        let mut builder = ObjectAccessControl::builder()
            .entity(self.entity.to_wire())
            .role(self.role.name());
        if let Some(id) = &self.id {
            builder = builder.id(id);
        }
        if let Some(etag) = &self.etag {
            builder = builder.etag(etag);
        }
        builder.build()
    }

    fn from_wire_parts(
        entity: Option<&str>,
        role: Option<&str>,
        id: Option<&String>,
        etag: Option<&String>,
    ) -> Self {
        Self {
            entity: Entity::from_wire(entity.unwrap_or_default()),
            role: Role::from(role.unwrap_or_default()),
            id: id.cloned(),
            etag: etag.cloned(),
        }
    }
}

impl From<&BucketAccessControl> for Acl {
    fn from(value: &BucketAccessControl) -> Self {
        Self::from_wire_parts(
            value.entity.as_deref(),
            value.role.as_deref(),
            value.id.as_ref(),
            value.etag.as_ref(),
        )
    }
}

impl From<&ObjectAccessControl> for Acl {
    fn from(value: &ObjectAccessControl) -> Self {
        Self::from_wire_parts(
            value.entity.as_deref(),
            value.role.as_deref(),
            value.id.as_ref(),
            value.etag.as_ref(),
        )
    }
}

/// A builder for [Acl].
#[derive(Clone, Debug)]
pub struct AclBuilder {
    inner: Acl,
}

impl AclBuilder {
    pub fn entity(mut self, v: Entity) -> Self {
        self.inner.entity = v;
        self
    }

    pub fn role(mut self, v: Role) -> Self {
        self.inner.role = v;
        self
    }

    pub fn id<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.id = Some(v.into());
        self
    }

    pub fn etag<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.etag = Some(v.into());
        self
    }

    pub fn build(self) -> Acl {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_test_utils::test_layer::CaptureEvents;
    use test_case::test_case;

    fn acl() -> Acl {
        Acl::builder(Entity::all_authenticated_users(), Role::Owner)
            .etag("etag")
            .id("id")
            .build()
    }

    #[test]
    fn builder() {
        let acl = acl();
        assert_eq!(acl.role(), &Role::Owner);
        assert_eq!(acl.entity(), &Entity::all_authenticated_users());
        assert_eq!(acl.etag(), Some("etag"));
        assert_eq!(acl.id(), Some("id"));
    }

    #[test]
    fn to_builder() {
        let acl = acl();
        assert_eq!(acl, acl.to_builder().build());
        let other = acl
            .to_builder()
            .etag("otherEtag")
            .id("otherId")
            .role(Role::Reader)
            .entity(Entity::all_users())
            .build();
        assert_eq!(other.role(), &Role::Reader);
        assert_eq!(other.entity(), &Entity::all_users());
        assert_eq!(other.etag(), Some("otherEtag"));
        assert_eq!(other.id(), Some("otherId"));
    }

    #[test]
    fn wire_roundtrip() {
        let acl = acl();
        assert_eq!(Acl::from(&acl.to_bucket_wire()), acl);
        assert_eq!(Acl::from(&acl.to_object_wire()), acl);
    }

    #[test]
    fn new() {
        let acl = Acl::new(Entity::all_users(), Role::Reader);
        assert_eq!(acl.entity(), &Entity::all_users());
        assert_eq!(acl.role(), &Role::Reader);
        assert_eq!(acl.id(), None);
        let wire = acl.to_object_wire();
        assert_eq!(wire.entity.as_deref(), Some("allUsers"));
        assert_eq!(wire.id, None);
        assert_eq!(Acl::from(&wire), acl);
        assert_eq!(Acl::from(&acl.to_bucket_wire()), acl);
    }

    #[test_case(Entity::domain("d1"), EntityType::Domain, "domain-d1")]
    #[test_case(Entity::group("g1"), EntityType::Group, "group-g1")]
    #[test_case(Entity::user("u1"), EntityType::User, "user-u1")]
    #[test_case(Entity::all_users(), EntityType::User, "allUsers")]
    #[test_case(Entity::all_authenticated_users(), EntityType::User, "allAuthenticatedUsers")]
    #[test_case(Entity::project(ProjectRole::Viewers, "p1"), EntityType::Project, "project-viewers-p1")]
    #[test_case(Entity::project(ProjectRole::Owners, "my-project"), EntityType::Project, "project-owners-my-project")]
    #[test_case(Entity::raw("bla"), EntityType::Unknown, "bla")]
    fn entity_roundtrip(entity: Entity, entity_type: EntityType, wire: &str) {
        assert_eq!(entity.entity_type(), entity_type);
        assert_eq!(entity.to_wire(), wire);
        assert_eq!(entity.to_string(), wire);
        assert_eq!(Entity::from_wire(wire), entity);
    }

    #[test_case("project-")]
    #[test_case("project-owners")]
    #[test_case("project-admins-p1")]
    #[test_case("")]
    fn malformed_entity(input: &str) {
        let got = Entity::from_wire(input);
        assert_eq!(got, Entity::raw(input));
        assert_eq!(got.entity_type(), EntityType::Unknown);
        assert_eq!(got.to_wire(), input);
    }

    #[test]
    fn raw_entity_logged() {
        let capture = CaptureEvents::new();
        let _guard = capture.install();
        let _ = Entity::from_wire("bla");
        let events = capture.events();
        let got = events.iter().find(|m| m.contains("keeping it as a raw entity"));
        assert!(got.is_some(), "{events:?}");
    }

    #[test_case(Role::Owner, "OWNER")]
    #[test_case(Role::Reader, "READER")]
    #[test_case(Role::Writer, "WRITER")]
    #[test_case(Role::UnknownValue("FUTURE".into()), "FUTURE")]
    fn role(role: Role, name: &str) {
        assert_eq!(role.name(), name);
        assert_eq!(role.to_string(), name);
        assert_eq!(Role::from(name), role);
    }

    #[test_case(ProjectRole::Owners, "owners")]
    #[test_case(ProjectRole::Editors, "editors")]
    #[test_case(ProjectRole::Viewers, "viewers")]
    fn project_role(role: ProjectRole, name: &str) {
        assert_eq!(role.name(), name);
        assert_eq!(ProjectRole::from_name(name), Some(role));
    }

    #[test]
    fn entity_accessors() {
        let Entity::Project {
            project_role,
            project_id,
        } = Entity::project(ProjectRole::Viewers, "p1")
        else {
            panic!("expected a project entity");
        };
        assert_eq!(project_role, ProjectRole::Viewers);
        assert_eq!(project_id, "p1");
    }
}
