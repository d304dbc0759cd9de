pub mod gallery;
pub mod install;
pub mod workbench;
