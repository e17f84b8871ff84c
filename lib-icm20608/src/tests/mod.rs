
mod utils;
mod driver;
