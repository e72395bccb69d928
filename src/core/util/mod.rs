pub mod coordinate_grid;
