mod property_partition;
mod property_roundtrip;
