mod float;
