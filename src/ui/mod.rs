// UI module containing the trim configuration panel

pub mod trim_panel;
