#[cfg(test)]
mod utils;

#[cfg(test)]
mod report;
