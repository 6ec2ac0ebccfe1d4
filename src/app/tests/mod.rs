mod config_init;
mod support;
mod terminal_surface;
