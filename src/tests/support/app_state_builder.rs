use actix_web::web;
use std::sync::Arc;

use crate::auth::application::services::session::SessionService;
use crate::modules::about::application::ports::outgoing::AboutRepository;
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceProjectRepository, ExperienceRepository,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::AppState;

use super::stubs::{
    StubAbouts, StubCertificates, StubContacts, StubEducations, StubExperienceProjects,
    StubExperiences, StubProjects, StubSkills,
};

/// Shared secret the test session service is configured with.
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// `AppState` with inert repositories; tests swap in a mock for the one
/// repository under test.
pub struct TestAppStateBuilder {
    abouts: Arc<dyn AboutRepository>,
    skills: Arc<dyn SkillRepository>,
    experiences: Arc<dyn ExperienceRepository>,
    experience_projects: Arc<dyn ExperienceProjectRepository>,
    educations: Arc<dyn EducationRepository>,
    certificates: Arc<dyn CertificateRepository>,
    projects: Arc<dyn ProjectRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            abouts: Arc::new(StubAbouts),
            skills: Arc::new(StubSkills),
            experiences: Arc::new(StubExperiences),
            experience_projects: Arc::new(StubExperienceProjects),
            educations: Arc::new(StubEducations),
            certificates: Arc::new(StubCertificates),
            projects: Arc::new(StubProjects),
            contacts: Arc::new(StubContacts),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_abouts(mut self, repo: impl AboutRepository + 'static) -> Self {
        self.abouts = Arc::new(repo);
        self
    }

    pub fn with_skills(mut self, repo: impl SkillRepository + 'static) -> Self {
        self.skills = Arc::new(repo);
        self
    }

    pub fn with_experiences(mut self, repo: impl ExperienceRepository + 'static) -> Self {
        self.experiences = Arc::new(repo);
        self
    }

    pub fn with_experience_projects(
        mut self,
        repo: impl ExperienceProjectRepository + 'static,
    ) -> Self {
        self.experience_projects = Arc::new(repo);
        self
    }

    pub fn with_educations(mut self, repo: impl EducationRepository + 'static) -> Self {
        self.educations = Arc::new(repo);
        self
    }

    pub fn with_certificates(mut self, repo: impl CertificateRepository + 'static) -> Self {
        self.certificates = Arc::new(repo);
        self
    }

    pub fn with_projects(mut self, repo: impl ProjectRepository + 'static) -> Self {
        self.projects = Arc::new(repo);
        self
    }

    pub fn with_contacts(mut self, repo: impl ContactRepository + 'static) -> Self {
        self.contacts = Arc::new(repo);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            sessions: SessionService::new(TEST_ADMIN_KEY),
            abouts: self.abouts,
            skills: self.skills,
            experiences: self.experiences,
            experience_projects: self.experience_projects,
            educations: self.educations,
            certificates: self.certificates,
            projects: self.projects,
            contacts: self.contacts,
        })
    }
}
