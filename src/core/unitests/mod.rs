mod test_config;
mod test_contact;
mod test_logger;
