//! One renderer per timeline scene.
//!
//! Each renderer maps a scene-local frame and the theme to a visual tree. Renderers share widgets
//! but never call each other.

pub(crate) mod features;
pub(crate) mod gateway;
pub(crate) mod install;
pub(crate) mod intro;
pub(crate) mod message;
pub(crate) mod outro;
pub(crate) mod walkthrough;

use crate::composition::theme::Theme;
use crate::composition::timeline::SceneId;
use crate::scene::model::Element;

/// Visual tree of `scene` at `local_frame`.
pub fn render_scene(scene: SceneId, local_frame: i64, theme: &Theme) -> Element {
    match scene {
        SceneId::Intro => intro::intro_scene(local_frame, theme),
        SceneId::Features => features::features_scene(local_frame, theme),
        SceneId::InstallCheck => install::install_scene(1, local_frame, theme),
        SceneId::InstallScript => install::install_scene(2, local_frame, theme),
        SceneId::InstallWizard => install::install_scene(3, local_frame, theme),
        SceneId::Gateway => gateway::gateway_scene(local_frame, theme),
        SceneId::Message => message::message_scene(local_frame, theme),
        SceneId::Outro => outro::outro_scene(local_frame, theme),
    }
}
