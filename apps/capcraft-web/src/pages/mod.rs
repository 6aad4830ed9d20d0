pub mod account;
pub mod contact;
pub mod generator;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod pricing;
pub mod signup;
