mod common;

use ads1219_rs::data_types::{address_from_pins, AddressPin, DataRate, Gain};
use ads1219_rs::driver::Ads1219;
use ads1219_rs::registers::{code_to_mv, sign_extend_24, DEFAULT_I2C_ADDRESS, MAX_I2C_ADDRESS};
use common::FakeBus;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3
}

#[test]
fn sign_extension_edges() {
    assert_eq!(sign_extend_24([0xFF, 0xFF, 0xFF]), -1);
    assert_eq!(sign_extend_24([0x80, 0x00, 0x00]), -8_388_608);
    assert_eq!(sign_extend_24([0x7F, 0xFF, 0xFF]), 8_388_607);
    assert_eq!(sign_extend_24([0x00, 0x00, 0x00]), 0);
    assert_eq!(sign_extend_24([0x00, 0x00, 0x01]), 1);
    // Bit 20 alone is a positive code.
    assert_eq!(sign_extend_24([0x10, 0x00, 0x00]), 0x10_0000);
    assert_eq!(sign_extend_24([0xF0, 0x00, 0x00]), -1_048_576);
}

#[test]
fn millivolts_scale_with_reference_and_gain() {
    let expected = 2048.0 * (8_388_607.0 / 8_388_608.0);
    assert!(approx(code_to_mv(8_388_607, 2048.0, Gain::One), expected));
    assert!(approx(code_to_mv(8_388_607, 2048.0, Gain::Four), expected / 4.0));
    assert!(approx(code_to_mv(-8_388_608, 2048.0, Gain::One), -2048.0));
    assert!(approx(code_to_mv(4_194_304, 5000.0, Gain::One), 2500.0));
    assert!(approx(code_to_mv(4_194_304, 2500.0, Gain::One), 1250.0));
    assert_eq!(code_to_mv(0, 2048.0, Gain::Four), 0.0);
}

#[test]
fn accessors_are_idempotent() {
    let mut bus = FakeBus::new(0);
    bus.data = [0x7F, 0xFF, 0xFF];
    let mut driver = Ads1219::new(bus);
    assert_eq!(driver.get_conversion_raw(), 0);
    driver.read_conversion().unwrap();

    let raw = driver.get_conversion_raw();
    let mv = driver.get_conversion_mv_internal();
    for _ in 0..3 {
        assert_eq!(driver.get_conversion_raw(), raw);
        assert_eq!(driver.get_conversion_mv_internal(), mv);
        assert_eq!(driver.get_conversion_mv(2048.0), mv);
    }
    assert!(approx(mv, 2047.9998));
}

#[test]
fn driver_millivolts_follow_gain_mirror() {
    let mut bus = FakeBus::new(0);
    bus.data = [0x7F, 0xFF, 0xFF];
    let mut driver = Ads1219::new(bus);
    driver.read_conversion().unwrap();
    let at_unity = driver.get_conversion_mv_internal();
    driver.set_gain(Gain::Four).unwrap();
    assert!(approx(driver.get_conversion_mv_internal(), at_unity / 4.0));
    assert_eq!(driver.get_conversion_raw(), 8_388_607);
}

#[test]
fn address_pins_cover_full_range() {
    let pins = [AddressPin::Dgnd, AddressPin::Dvdd, AddressPin::Sda, AddressPin::Scl];
    let mut expected = DEFAULT_I2C_ADDRESS;
    for a1 in pins {
        for a0 in pins {
            assert_eq!(address_from_pins(a1, a0), expected);
            expected += 1;
        }
    }
    assert_eq!(address_from_pins(AddressPin::Scl, AddressPin::Scl), MAX_I2C_ADDRESS);
}

#[test]
fn data_rate_codes() {
    let rates = [
        (DataRate::Sps20, 0b00, 20),
        (DataRate::Sps90, 0b01, 90),
        (DataRate::Sps330, 0b10, 330),
        (DataRate::Sps1000, 0b11, 1000),
    ];
    for (rate, bits, sps) in rates {
        assert_eq!(rate.bits(), bits);
        assert_eq!(DataRate::from_bits(bits), rate);
        assert_eq!(rate.samples_per_second(), sps);
    }
}
