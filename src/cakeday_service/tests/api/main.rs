mod birthdays;
mod helpers;
mod login;
mod logout;
mod me;
mod signup;
