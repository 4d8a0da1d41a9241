pub mod controller;
pub mod crud;
