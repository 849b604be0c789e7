mod emergency_shutdown;
