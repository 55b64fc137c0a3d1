pub mod mat4;
pub mod vec2;
pub mod vec3;
