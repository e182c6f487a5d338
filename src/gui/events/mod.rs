mod keyboard;
mod mouse;
mod redraw;
