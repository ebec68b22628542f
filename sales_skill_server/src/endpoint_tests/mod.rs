mod alexa;
mod health;
mod helpers;
mod mocks;
