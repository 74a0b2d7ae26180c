mod assemble;
mod config_files;
mod login;
