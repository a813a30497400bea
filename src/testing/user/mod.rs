mod show;
mod store;
