mod api;
mod app;
mod config;
mod dashboard;
mod dom;
mod error;
mod forms;
mod map;
mod notifier;
mod session;
mod storage;
mod theme;

fn main() {
    app::start();
}
