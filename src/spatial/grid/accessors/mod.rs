mod cell_ops;
mod hue;
mod pointers;
mod velocity;
