pub mod slices;
