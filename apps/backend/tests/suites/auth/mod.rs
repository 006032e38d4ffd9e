mod context_binder;
mod login;
mod register;
