pub mod sd_webui;
