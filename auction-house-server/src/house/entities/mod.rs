mod auction;
mod bidder;
mod house;

pub use {
    auction::*,
    bidder::*,
    house::*,
};
