mod configuration;
mod toggle;
