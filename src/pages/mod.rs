pub mod admin;
pub mod dashboard;
pub mod landing;
pub mod signin;
pub mod signup;
