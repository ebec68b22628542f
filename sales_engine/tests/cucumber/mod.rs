mod setups;
mod skill_world;
mod steps;

pub use skill_world::SkillWorld;
