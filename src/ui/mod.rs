pub mod progress;

pub fn print_banner() {
    println!("qpsksim: QPSK over AWGN with an OFDM-style frame round trip");
}
