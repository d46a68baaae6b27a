mod letter_m;
mod nonconvex_domain;
mod sampling;
mod square_domain;
mod trimming;
