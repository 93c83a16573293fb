mod mul;
mod scratch;
mod torus_poly;
