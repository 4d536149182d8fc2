//! Inert repository implementations for handler tests. Lists come back
//! empty; writes fail loudly so a test reaching an unconfigured
//! repository is visible as a 500 instead of a silent pass.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::ports::outgoing::{
    AboutData, AboutRecord, AboutRepository, AboutRepositoryError,
};
use crate::modules::certificate::application::ports::outgoing::{
    CertificateData, CertificateRecord, CertificateRepository, CertificateRepositoryError,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactData, ContactRecord, ContactRepository, ContactRepositoryError,
};
use crate::modules::education::application::ports::outgoing::{
    EducationData, EducationRecord, EducationRepository, EducationRepositoryError,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceData, ExperienceProjectData, ExperienceProjectRecord, ExperienceProjectRepository,
    ExperienceProjectRepositoryError, ExperienceRecord, ExperienceRepository,
    ExperienceRepositoryError,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillData, SkillRecord, SkillRepository, SkillRepositoryError,
};

const STUB: &str = "stub repository not configured for this test";

pub struct StubAbouts;

#[async_trait]
impl AboutRepository for StubAbouts {
    async fn list(&self) -> Result<Vec<AboutRecord>, AboutRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(&self, _data: AboutData) -> Result<AboutRecord, AboutRepositoryError> {
        Err(AboutRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: AboutData,
    ) -> Result<AboutRecord, AboutRepositoryError> {
        Err(AboutRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), AboutRepositoryError> {
        Err(AboutRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubSkills;

#[async_trait]
impl SkillRepository for StubSkills {
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(&self, _data: SkillData) -> Result<SkillRecord, SkillRepositoryError> {
        Err(SkillRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubExperiences;

#[async_trait]
impl ExperienceRepository for StubExperiences {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(
        &self,
        _data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        Err(ExperienceRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        Err(ExperienceRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ExperienceRepositoryError> {
        Err(ExperienceRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubExperienceProjects;

#[async_trait]
impl ExperienceProjectRepository for StubExperienceProjects {
    async fn create(
        &self,
        _data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
        Err(ExperienceProjectRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
        Err(ExperienceProjectRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ExperienceProjectRepositoryError> {
        Err(ExperienceProjectRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubEducations;

#[async_trait]
impl EducationRepository for StubEducations {
    async fn list(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(
        &self,
        _data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        Err(EducationRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        Err(EducationRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), EducationRepositoryError> {
        Err(EducationRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubCertificates;

#[async_trait]
impl CertificateRepository for StubCertificates {
    async fn list(&self) -> Result<Vec<CertificateRecord>, CertificateRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(
        &self,
        _data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        Err(CertificateRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        Err(CertificateRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), CertificateRepositoryError> {
        Err(CertificateRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubProjects;

#[async_trait]
impl ProjectRepository for StubProjects {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(&self, _data: ProjectData) -> Result<ProjectRecord, ProjectRepositoryError> {
        Err(ProjectRepositoryError::DatabaseError(STUB.into()))
    }

    async fn update(
        &self,
        _id: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        Err(ProjectRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
        Err(ProjectRepositoryError::DatabaseError(STUB.into()))
    }
}

pub struct StubContacts;

#[async_trait]
impl ContactRepository for StubContacts {
    async fn list(&self) -> Result<Vec<ContactRecord>, ContactRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(&self, _data: ContactData) -> Result<ContactRecord, ContactRepositoryError> {
        Err(ContactRepositoryError::DatabaseError(STUB.into()))
    }

    async fn set_read(
        &self,
        _id: Uuid,
        _read: bool,
    ) -> Result<ContactRecord, ContactRepositoryError> {
        Err(ContactRepositoryError::DatabaseError(STUB.into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ContactRepositoryError> {
        Err(ContactRepositoryError::DatabaseError(STUB.into()))
    }
}
