mod testutils;
