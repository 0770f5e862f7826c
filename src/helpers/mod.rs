pub mod handler_404;

#[cfg(test)]
pub mod test_server;
