pub mod home;
pub mod species_list;
