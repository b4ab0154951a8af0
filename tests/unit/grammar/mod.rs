mod generator;
mod label;
