// demos/read_sensor.rs
//
// cargo run --example read_sensor --features impl-serialport -- /dev/ttyUSB0

use e2bus::adapters::serial_port::SerialPortInterface;
use e2bus::{ChannelPolicy, MasterConfig, SyncMaster};
use std::time::Duration;

fn main() {
    let port = std::env::args().nth(1).unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    let config = MasterConfig::default()
        .response_delay(Duration::from_millis(400))
        .channel_policy(ChannelPolicy::HumidityTemperature);
    let mut master = SyncMaster::with_config(SerialPortInterface::new(&port), config);

    println!("{} {}", master.manufacturer(), master.instrument_id());
    println!("capabilities: {:?}", master.probe());

    for _ in 0..3 {
        let values = master.sample();
        match (values.humidity(), values.temperature()) {
            (Some(rh), Some(t)) => println!("{:.2} %RH  {:.2} °C", rh, t),
            _ => println!("cycle invalid: {}", values),
        }
    }

    master.close();
}
