#[cfg(test)]
mod test_auth;
#[cfg(test)]
mod test_wishes;
