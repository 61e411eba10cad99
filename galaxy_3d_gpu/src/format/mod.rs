/// Format catalog - pixel formats, vertex element types and sample counts

pub mod pixel_format;
pub mod shader_data_type;
pub mod sample_count;

pub use pixel_format::*;
pub use shader_data_type::*;
pub use sample_count::*;
