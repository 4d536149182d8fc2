mod create_skill;
mod get_skills;

pub use create_skill::create_skill_handler;
pub use get_skills::get_skills_handler;
