//! Team tools module.
//!
//! Tools scoped to a Figma team:
//! - `get_team_projects`: Projects of the team
//! - `get_component_styles`: Styles published by the team
//!
//! Team webhooks live in the `webhooks` module.

pub mod get_component_styles;
pub mod get_team_projects;

pub use get_component_styles::{GetComponentStylesParams, GetComponentStylesTool};
pub use get_team_projects::{GetTeamProjectsParams, GetTeamProjectsTool};
