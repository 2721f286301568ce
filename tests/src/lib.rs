mod util;

mod properties;
mod scenarios;
