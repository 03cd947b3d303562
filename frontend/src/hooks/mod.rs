pub mod use_app_controller;
