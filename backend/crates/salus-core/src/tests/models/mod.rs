mod new_user;
mod user;
mod user_role;
