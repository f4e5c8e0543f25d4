/// Rendering modules for model loading and the swing animation
pub mod animation_systems;
pub mod model_loader;
