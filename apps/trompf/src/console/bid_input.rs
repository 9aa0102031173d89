use std::io::{BufRead, Write};

use crate::console::Prompter;
use crate::domain::rules::MAX_BID;
use crate::domain::{BidRequest, BidSource};
use crate::errors::domain::DomainError;

/// Reads bids typed at the console.
pub struct ConsoleBidSource<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> ConsoleBidSource<'a, R, W> {
    pub fn new(prompter: &'a mut Prompter<R, W>) -> Self {
        Self { prompter }
    }
}

impl<R: BufRead, W: Write> BidSource for ConsoleBidSource<'_, R, W> {
    fn next_bid(&mut self, request: &BidRequest<'_>) -> Result<String, DomainError> {
        self.prompter
            .ask(&format!("{}, please enter bid (0-{MAX_BID}): ", request.name))
    }
}
