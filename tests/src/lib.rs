#![cfg(test)]

mod birds;
mod devices;
mod discount;
mod invoice;
mod messaging;
