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

//! The Cloud Storage JSON API access control messages.

use serde::{Deserialize, Serialize};

/// The project team associated with an access control entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectTeam {
    /// The project number.
    pub project_number: Option<String>,
    /// The team, one of `owners`, `editors`, or `viewers`.
    pub team: Option<String>,
}

impl ProjectTeam {
    /// Creates a builder to more easily construct the [ProjectTeam] struct.
    pub fn builder() -> ProjectTeamBuilder {
        Default::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default)]
/// A builder used to more easily construct the [ProjectTeam] struct.
pub struct ProjectTeamBuilder {
    project_number: Option<String>,
    team: Option<String>,
}

impl ProjectTeamBuilder {
    pub fn project_number(mut self, value: impl Into<String>) -> Self {
        self.project_number = Some(value.into());
        self
    }
    pub fn team(mut self, value: impl Into<String>) -> Self {
        self.team = Some(value.into());
        self
    }
    pub fn build(self) -> ProjectTeam {
        ProjectTeam {
            project_number: self.project_number,
            team: self.team,
        }
    }
}

/// An access control entry for a bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketAccessControl {
    /// The name of the bucket.
    pub bucket: Option<String>,
    /// The domain associated with the entity, if any.
    pub domain: Option<String>,
    /// The email address associated with the entity, if any.
    pub email: Option<String>,
    /// The entity holding the permission, for example `user-liz@example.com`
    /// or `project-owners-my-project`.
    pub entity: Option<String>,
    /// The ID for the entity, if any.
    pub entity_id: Option<String>,
    /// HTTP 1.1 entity tag for the access control entry.
    pub etag: Option<String>,
    /// The ID of the access control entry.
    pub id: Option<String>,
    /// Always `storage#bucketAccessControl`.
    pub kind: Option<String>,
    /// The project team associated with the entity, if any.
    pub project_team: Option<ProjectTeam>,
    /// The access permission for the entity.
    pub role: Option<String>,
    /// The link to this access control entry.
    pub self_link: Option<String>,
}

impl BucketAccessControl {
    /// Creates a builder to more easily construct the [BucketAccessControl] struct.
    pub fn builder() -> BucketAccessControlBuilder {
        Default::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default)]
/// A builder used to more easily construct the [BucketAccessControl] struct.
pub struct BucketAccessControlBuilder {
    inner: BucketAccessControl,
}

impl BucketAccessControlBuilder {
    pub fn bucket(mut self, value: impl Into<String>) -> Self {
        self.inner.bucket = Some(value.into());
        self
    }
    pub fn domain(mut self, value: impl Into<String>) -> Self {
        self.inner.domain = Some(value.into());
        self
    }
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.inner.email = Some(value.into());
        self
    }
    pub fn entity(mut self, value: impl Into<String>) -> Self {
        self.inner.entity = Some(value.into());
        self
    }
    pub fn entity_id(mut self, value: impl Into<String>) -> Self {
        self.inner.entity_id = Some(value.into());
        self
    }
    pub fn etag(mut self, value: impl Into<String>) -> Self {
        self.inner.etag = Some(value.into());
        self
    }
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.inner.id = Some(value.into());
        self
    }
    pub fn project_team(mut self, value: ProjectTeam) -> Self {
        self.inner.project_team = Some(value);
        self
    }
    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.inner.role = Some(value.into());
        self
    }
    pub fn self_link(mut self, value: impl Into<String>) -> Self {
        self.inner.self_link = Some(value.into());
        self
    }
    pub fn build(self) -> BucketAccessControl {
        BucketAccessControl {
            kind: Some("storage#bucketAccessControl".to_string()),
            ..self.inner
        }
    }
}

/// An access control entry for an object.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectAccessControl {
    /// The name of the bucket.
    pub bucket: Option<String>,
    /// The name of the object, if applied to an object.
    pub object: Option<String>,
    /// The content generation of the object, if applied to an object.
    pub generation: Option<String>,
    /// The domain associated with the entity, if any.
    pub domain: Option<String>,
    /// The email address associated with the entity, if any.
    pub email: Option<String>,
    /// The entity holding the permission.
    pub entity: Option<String>,
    /// The ID for the entity, if any.
    pub entity_id: Option<String>,
    /// HTTP 1.1 entity tag for the access control entry.
    pub etag: Option<String>,
    /// The ID of the access control entry.
    pub id: Option<String>,
    /// Always `storage#objectAccessControl`.
    pub kind: Option<String>,
    /// The project team associated with the entity, if any.
    pub project_team: Option<ProjectTeam>,
    /// The access permission for the entity.
    pub role: Option<String>,
    /// The link to this access control entry.
    pub self_link: Option<String>,
}

impl ObjectAccessControl {
    /// Creates a builder to more easily construct the [ObjectAccessControl] struct.
    pub fn builder() -> ObjectAccessControlBuilder {
        Default::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default)]
/// A builder used to more easily construct the [ObjectAccessControl] struct.
pub struct ObjectAccessControlBuilder {
    inner: ObjectAccessControl,
}

impl ObjectAccessControlBuilder {
    pub fn bucket(mut self, value: impl Into<String>) -> Self {
        self.inner.bucket = Some(value.into());
        self
    }
    pub fn object(mut self, value: impl Into<String>) -> Self {
        self.inner.object = Some(value.into());
        self
    }
    pub fn generation(mut self, value: impl Into<String>) -> Self {
        self.inner.generation = Some(value.into());
        self
    }
    pub fn domain(mut self, value: impl Into<String>) -> Self {
        self.inner.domain = Some(value.into());
        self
    }
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.inner.email = Some(value.into());
        self
    }
    pub fn entity(mut self, value: impl Into<String>) -> Self {
        self.inner.entity = Some(value.into());
        self
    }
    pub fn entity_id(mut self, value: impl Into<String>) -> Self {
        self.inner.entity_id = Some(value.into());
        self
    }
    pub fn etag(mut self, value: impl Into<String>) -> Self {
        self.inner.etag = Some(value.into());
        self
    }
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.inner.id = Some(value.into());
        self
    }
    pub fn project_team(mut self, value: ProjectTeam) -> Self {
        self.inner.project_team = Some(value);
        self
    }
    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.inner.role = Some(value.into());
        self
    }
    pub fn self_link(mut self, value: impl Into<String>) -> Self {
        self.inner.self_link = Some(value.into());
        self
    }
    pub fn build(self) -> ObjectAccessControl {
        ObjectAccessControl {
            kind: Some("storage#objectAccessControl".to_string()),
            ..self.inner
        }
    }
}
