mod emphasis;
mod line_handler;
mod registry;
mod transform;

pub use emphasis::Emphasizer;
pub use line_handler::LineHandler;
pub use registry::TransformRegistry;
pub use transform::Transform;
