mod common;

mod output;
