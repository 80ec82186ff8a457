// App layer: the CLI commands, kept free of clap so they can be tested directly.

pub mod commands;
