pub mod spam_check;
