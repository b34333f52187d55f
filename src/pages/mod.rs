pub mod applications;
pub mod candidate;
pub mod company;
pub mod interview;
pub mod landing;
pub mod shell;
