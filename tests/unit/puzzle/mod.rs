mod board;
mod generator;
