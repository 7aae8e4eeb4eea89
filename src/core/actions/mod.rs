pub mod generate_cells;
